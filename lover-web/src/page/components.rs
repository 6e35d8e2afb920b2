pub mod hero;
pub mod mini_preview;
pub mod nav_bar;
pub mod sections;
