pub mod logging;
pub mod output;
pub mod paths;
pub mod timestamps;

pub use logging::init_logging;
pub use output::{ensure_dir, write_json};
pub use paths::{first_segment, safe_file_stem, to_posix};
pub use timestamps::{epoch_to_iso, epoch_to_iso_in};
