//! Binary entry point. All application logic is in [`bistro_lib::run`].

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    bistro_lib::run()
}
