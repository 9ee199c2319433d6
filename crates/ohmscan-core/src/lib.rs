pub mod error;
pub mod frame;
pub mod consts;
pub mod color;
pub mod filters;
pub mod roi;
pub mod detect;
pub mod decode;
pub mod overlay;
pub mod io;
pub mod pipeline;
