pub mod admin;
pub mod dispatch;
pub mod list;
pub mod schema;
pub mod shared;
pub mod status;
pub mod submit;

#[cfg(test)]
pub fn test_flags() -> crate::cli::GlobalFlags {
    crate::cli::GlobalFlags {
        format: crate::cli::OutputFormat::Json,
        limit: None,
        quiet: false,
        color: crate::cli::ColorMode::Never,
        data_dir: None,
    }
}
