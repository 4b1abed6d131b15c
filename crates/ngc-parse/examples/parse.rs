//! Parses a small LinuxCNC program and prints each finalized line.
//!
//! Run with: cargo run --example parse

use ngc_parse::{Dialect, MachineState, Number, Parser};

fn main() -> ngc_parse::Result<()> {
    let state = MachineState::new()
        .with_named_parameters([("defined", Number::Int(10)), ("param", Number::Int(1))]);
    let mut parser = Parser::with_state(Dialect::linuxcnc(), state);

    let gcode = "\
#<depth> = 2
#1 = 0
#1 = 1 G0 X#1 Y#<depth> (pending write, X still sees 0) #1 = 2 ; G0 X0 Y2
G[#1 - 1] X[1 * 1/1 - 1 ** 1 + LN[1]] ; G1 X0
";

    for line in parser.parse(gcode)? {
        println!("{line}");
    }

    Ok(())
}
