//! Request-scoped services used by the handlers

pub mod upload;

pub use upload::VideoUploadService;
