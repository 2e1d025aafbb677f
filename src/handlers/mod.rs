mod home;
mod redirect;
mod shorten;

pub use home::home_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
