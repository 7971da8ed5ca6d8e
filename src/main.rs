use lcdclock::{ClockConfig, HandIndices, LinePlotter};

const USAGE: &str = "usage: lcdclock [frame_delay_ms] [--bresenham]";

fn main() {
    let mut config = ClockConfig {
        start: HandIndices::DEMO_START,
        ..ClockConfig::default()
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--bresenham" => config.hand_plotter = LinePlotter::Bresenham,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            delay => match delay.parse() {
                Ok(ms) => config.frame_delay_ms = ms,
                Err(_) => {
                    eprintln!("{}", USAGE);
                    std::process::exit(2);
                }
            },
        }
    }

    if let Err(e) = lcdclock::simple_run::run(config) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
