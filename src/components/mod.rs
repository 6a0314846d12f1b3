//! UI Components

mod about_dialog;
mod collection_page;
mod delete_confirm_button;
mod header_bar;
mod ingredient_list;
mod new_recipe_page;
mod recipe_image;
mod recipe_row;
mod search_page;
mod shopping_list_page;
mod toast_host;
mod view_switcher;

pub use about_dialog::AboutDialog;
pub use collection_page::CollectionPage;
pub use delete_confirm_button::DeleteConfirmButton;
pub use header_bar::{apply_document_theme, HeaderBar};
pub use ingredient_list::IngredientList;
pub use new_recipe_page::NewRecipePage;
pub use recipe_image::RecipeThumb;
pub use recipe_row::{RecipeRow, RowMode};
pub use search_page::SearchPage;
pub use shopping_list_page::ShoppingListPage;
pub use toast_host::ToastHost;
pub use view_switcher::ViewSwitcher;
