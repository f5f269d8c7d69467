//! Easy Body Class - CSS classes for the `<body>` tag
//!
//! A controller shapes the class list for one request; the view renders it.
//! Defaults come from the application's parameter store.

pub mod classes;
pub mod params;
pub mod manager;
pub mod page;

pub use classes::BodyClass;
pub use params::{ConfigurationKeyError, ParamStore, Params, ParamsError};
pub use manager::{BodyClassManager, DEFAULT_PARAM_KEY};
pub use page::Page;
