//! Native File Dialogs

use tauri::{AppHandle, command, Runtime};
use tauri_plugin_dialog::DialogExt;

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Ask for a picture; `None` when cancelled
#[command]
pub async fn pick_image<R: Runtime>(app: AppHandle<R>) -> Result<Option<String>, String> {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let result = app
            .dialog()
            .file()
            .set_title("Select Image")
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .blocking_pick_file();
        match result {
            Some(path) => Ok(Some(path.to_string())),
            None => Ok(None),
        }
    }
    #[cfg(any(target_os = "android", target_os = "ios"))]
    {
        let _ = (app, IMAGE_EXTENSIONS);
        Ok(None)
    }
}
