use std::io::{self, Stderr, Stdout, Write};

// Output seam for the subcommands so their stdout/stderr can be captured
// in tests. Diagnostics always go through write_err.
pub trait OutErr {
    fn write(&mut self, s: &str);
    fn write_err(&mut self, s: &str);
}

pub struct OtpWriter {
    pub out: Stdout,
    pub err: Stderr,
}

impl OtpWriter {
    pub fn new() -> Self {
        OtpWriter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl OutErr for OtpWriter {
    fn write(&mut self, s: &str) {
        if let Err(e) = self.out.write_all(s.as_bytes()) {
            eprintln!("{}", e);
        }
    }

    fn write_err(&mut self, s: &str) {
        if let Err(e) = self.err.write_all(s.as_bytes()) {
            eprintln!("{}", e);
        }
    }
}
