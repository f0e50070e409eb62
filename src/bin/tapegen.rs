//! Driver binary: compiles the built-in sample operation sequence and prints
//! the resulting tape machine code.

use clap::Parser;
use tapegen::{compile, demo_program, CellWidth, EmitContext, MachineConfig};

#[derive(Parser, Debug)]
#[command(name = "tapegen", version, about = "Emit tape machine code for the sample program")]
struct Args {
    /// Fixed cell width in bits (1-32); cells are unbounded when omitted.
    #[arg(long, value_name = "BITS")]
    cell_bits: Option<u32>,

    /// Print emission statistics to stderr.
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let cell_width = match args.cell_bits {
        Some(bits) => CellWidth::bits(bits)?,
        None => CellWidth::Unbounded,
    };
    let config = MachineConfig::new(cell_width);
    let ops = demo_program();

    if args.stats {
        let mut ctx = EmitContext::with_config(config);
        tapegen::lower(&mut ctx, &ops)?;
        eprintln!("{}", ctx.stats());
        println!("{}", ctx.program());
    } else {
        println!("{}", compile(&ops, config)?);
    }
    Ok(())
}
