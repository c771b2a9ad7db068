#![allow(missing_docs)]

//! Error types for the minjs library, built with `error-chain`

use error_chain::error_chain;

error_chain! {
    foreign_links {
        Io(std::io::Error);
    }

    errors {
        Read(path: String) {
            description("could not read source file")
            display("could not read '{}'", path)
        }

        Transform(diagnostic: String) {
            description("minifier rejected the source")
            display("{}", diagnostic)
        }

        CreateDir(path: String) {
            description("could not create destination directory")
            display("could not create directory '{}'", path)
        }

        Write(path: String) {
            description("could not write destination file")
            display("could not write '{}'", path)
        }

        MinifierPanicked(message: String) {
            description("minifier panicked")
            display("minifier panicked: {}", message)
        }
    }
}

pub use error_chain::bail;
