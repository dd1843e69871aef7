// Shared chrome drawn around every screen

pub mod footer;
pub mod header;
pub mod nav_bar;

pub use footer::Footer;
pub use header::Header;
pub use nav_bar::NavBar;
