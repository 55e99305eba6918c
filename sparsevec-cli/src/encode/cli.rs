use clap::{Command, arg};

pub const ENCODE_CMD: &str = "encode";

pub fn create_encode_cli() -> Command {
    Command::new(ENCODE_CMD)
        .author("Databio")
        .about("Encode sparsevec literals ('{1:1,3:2}/3' or '[1,0,2]') for the wire")
        .arg(arg!(-f --format <format> "Wire format to produce: binary (printed as hex) or text"))
        .arg(arg!([literals] ... "Literals to encode. Reads one per line from stdin when omitted"))
}
