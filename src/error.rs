use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("WebGL 2 is not supported by your browser")]
    Unsupported,

    #[error("no canvas element with id `{0}`")]
    MissingElement(String),

    #[error("unknown demo `{0}`")]
    UnknownDemo(String),

    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),

    #[error("program link failed: {0}")]
    ProgramLink(String),

    #[error("failed to create {0}")]
    Allocation(&'static str),

    #[error("vertex attribute `{0}` not found")]
    MissingAttribute(&'static str),
}

impl From<DemoError> for JsValue {
    fn from(err: DemoError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
