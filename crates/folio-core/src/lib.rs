pub mod carousel;
pub mod choreography;
pub mod constants;
pub mod content;
pub mod error;
pub mod layout;
pub mod mapper;
pub mod physics;
pub mod preloader;
pub mod progress;
pub mod scroll;
pub mod signal;
pub mod sticky;
pub mod trail;
pub mod tween;
pub mod variants;

pub use carousel::*;
pub use choreography::*;
pub use error::*;
pub use layout::*;
pub use mapper::*;
pub use physics::*;
pub use preloader::*;
pub use progress::*;
pub use scroll::*;
pub use signal::*;
pub use sticky::*;
pub use trail::*;
pub use tween::*;
pub use variants::*;
