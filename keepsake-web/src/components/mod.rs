pub mod heart_icon;
pub mod nav_tabs;
