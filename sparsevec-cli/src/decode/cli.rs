use clap::{Command, arg};

pub const DECODE_CMD: &str = "decode";

pub fn create_decode_cli() -> Command {
    Command::new(DECODE_CMD)
        .author("Databio")
        .about("Decode sparsevec wire values (hex for binary) back into literals")
        .arg(arg!(-f --format <format> "Wire format of the input: binary (hex) or text"))
        .arg(arg!(--json "Print each vector as JSON instead of a text literal"))
        .arg(arg!([inputs] ... "Values to decode, '\\N' for NULL. Reads one per line from stdin when omitted"))
}
