use std::env;
use std::process;

use nes_bus::{debug_flags, Console, Lenient, Memory, Mirroring, Nrom, RegisterFile};

// Bus probe: builds a console with a patterned NROM board and hex-dumps a
// range through the CPU or PPU bus.
//   cargo run --bin bus_probe -- --space cpu --start 0x4000 --len 0x40
//   cargo run --bin bus_probe -- --space ppu --start 0x2000 --len 0x1000 --fill 0xAA --mirroring horizontal
// Unmapped accesses follow NES_BUS_FAULT (halt, zero, open-bus); with halt
// they show up as "--".

#[derive(Debug, Clone, Copy, PartialEq)]
enum Space {
    Cpu,
    Ppu,
}

struct Args {
    space: Space,
    start: u32,
    len: u32,
    fill: Option<u8>,
    mirroring: Mirroring,
}

fn parse_u32_hex_or_dec(s: &str) -> Option<u32> {
    let s = s.trim();
    if let Some(stripped) = s.strip_prefix("0x") {
        u32::from_str_radix(stripped, 16).ok()
    } else {
        s.parse().ok()
    }
}

fn parse_mirroring(s: &str) -> Option<Mirroring> {
    match s {
        "horizontal" | "h" => Some(Mirroring::Horizontal),
        "vertical" | "v" => Some(Mirroring::Vertical),
        "single-lower" => Some(Mirroring::SingleLower),
        "single-upper" => Some(Mirroring::SingleUpper),
        "four-screen" | "four" => Some(Mirroring::FourScreen),
        _ => None,
    }
}

fn parse_args() -> Result<Args, String> {
    let mut args = env::args().skip(1);
    let mut parsed = Args {
        space: Space::Cpu,
        start: 0,
        len: 0x100,
        fill: None,
        mirroring: Mirroring::Vertical,
    };

    while let Some(a) = args.next() {
        let value = args.next().ok_or_else(|| format!("missing value for {}", a))?;
        match a.as_str() {
            "--space" => {
                parsed.space = match value.as_str() {
                    "cpu" => Space::Cpu,
                    "ppu" => Space::Ppu,
                    other => return Err(format!("unknown space: {}", other)),
                }
            }
            "--start" => {
                parsed.start =
                    parse_u32_hex_or_dec(&value).ok_or_else(|| format!("bad start: {}", value))?
            }
            "--len" | "--length" => {
                parsed.len =
                    parse_u32_hex_or_dec(&value).ok_or_else(|| format!("bad length: {}", value))?
            }
            "--fill" => {
                let fill =
                    parse_u32_hex_or_dec(&value).ok_or_else(|| format!("bad fill: {}", value))?;
                parsed.fill = Some(fill as u8);
            }
            "--mirroring" => {
                parsed.mirroring =
                    parse_mirroring(&value).ok_or_else(|| format!("bad mirroring: {}", value))?
            }
            other => return Err(format!("unknown option: {}", other)),
        }
    }

    Ok(parsed)
}

fn probe<M: Memory>(bus: &mut M, args: &Args) {
    let end = args.start.saturating_add(args.len).min(0x10000);
    if let Some(fill) = args.fill {
        for addr in args.start..end {
            if let Err(err) = bus.write(addr as u16, fill) {
                log::error!("{}", err);
            }
        }
    }

    let mut faults = 0;
    let mut addr = args.start;
    while addr < end {
        let line_end = (addr + 16).min(end);
        print!("{:04X}:", addr);
        for a in addr..line_end {
            match bus.read(a as u16) {
                Ok(data) => print!(" {:02X}", data),
                Err(_) => {
                    faults += 1;
                    print!(" --");
                }
            }
        }
        println!();
        addr = line_end;
    }

    if faults > 0 {
        println!("{} unmapped read(s)", faults);
    }
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!(
                "usage: bus_probe [--space cpu|ppu] [--start N] [--len N] [--fill N] [--mirroring MODE]"
            );
            process::exit(2);
        }
    };

    let prg: Vec<u8> = (0..0x8000u32).map(|i| (i >> 8) as u8).collect();
    let cart = match Nrom::new(prg, Vec::new(), args.mirroring) {
        Ok(cart) => cart,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };
    let mut console = Console::new(RegisterFile::new(), Box::new(cart));
    let policy = debug_flags::fault_policy();

    println!(
        "{:?} bus dump: start=0x{:04X} len=0x{:04X} policy={:?}",
        args.space, args.start, args.len, policy
    );
    match args.space {
        Space::Cpu => probe(&mut Lenient::new(console.cpu_bus(), policy), &args),
        Space::Ppu => probe(&mut Lenient::new(console.ppu_bus(), policy), &args),
    }
}
