pub mod artifacts;
pub mod generate;
pub mod palette;

pub use artifacts::{
    handle_render_all, handle_render_chart, handle_render_gauge, handle_render_legend,
    ArtifactPaths, RenderAllResponse, RenderRequest, RenderResponse, __path_handle_render_all,
    __path_handle_render_chart, __path_handle_render_gauge, __path_handle_render_legend,
};
pub use generate::{
    handle_generate, ColorEntry, GenerateResponse, MAX_UPLOAD_BYTES, __path_handle_generate,
};
pub use palette::{
    handle_clear, handle_numbers, handle_recolor, NumbersRequest, RecolorRequest, RecolorResponse,
    SuccessResponse, __path_handle_clear, __path_handle_numbers, __path_handle_recolor,
};
