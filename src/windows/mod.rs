pub mod catalog;
pub mod cosine_sum;
pub mod generators;
pub mod registry;
pub mod state;

pub use registry::{
    ComputedWindow, DEFAULT_FAMILY, ParamSpec, WindowDescriptor, WindowFn, WindowRegistry,
};
pub use state::WindowState;
