// Purpose - external interfaces, format conversions

pub mod wav;

pub use wav::write_wav;
