#![allow(missing_docs)]

use error_chain::error_chain;

error_chain! {
    links {
        Lib(minjs::errors::Error, minjs::errors::ErrorKind);
    }

    errors {
        Usage(program: String) {
            description("missing arguments")
            display("Usage: {} <input-file> <output-file>", program)
        }
    }
}

pub use error_chain::bail;
