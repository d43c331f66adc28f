pub mod rodio_output;
