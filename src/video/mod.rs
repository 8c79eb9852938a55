mod preload;
mod sources;

pub use preload::VideoPreload;
