pub mod camera;
pub mod clock;
pub mod color;
pub mod color_cycle;
pub mod config;
pub mod constants;
pub mod error;
pub mod experience;
pub mod form;
pub mod frame;
pub mod geometry;
pub mod loading;
pub mod navigation;
pub mod pointer;
pub mod reveal;
pub mod scene;
pub mod state;
pub mod tween;

pub use camera::*;
pub use clock::Clock;
pub use color::{Hsl, Rgb};
pub use color_cycle::*;
pub use config::*;
pub use error::CoreError;
pub use experience::Experience;
pub use frame::*;
pub use geometry::{build_mesh, MeshData, MeshVertex};
pub use pointer::*;
pub use scene::*;
pub use state::*;
pub use tween::{Ease, ReversibleTween, Tween};
