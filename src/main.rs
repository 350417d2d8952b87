// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use svgfns::{ParseOptions, Point, Rect};

fn main() {
    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn process() -> Result<(), String> {
    let args = match collect_args() {
        Ok(args) => args,
        Err(e) => {
            println!("{}", HELP);
            return Err(e.to_string());
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            let level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
            log::set_max_level(level);
        }
    }

    let opt = ParseOptions { max_len: args.max_len };
    let ts = if args.strict {
        svgfns::parse_transform_strict(&args.transform, &opt).map_err(|e| e.to_string())?
    } else {
        svgfns::parse_transform_with(args.transform.as_str(), &opt)
    };

    let r = |n: f64| round_to(n, args.precision);

    println!("matrix({} {} {} {} {} {})", r(ts.a), r(ts.b), r(ts.c), r(ts.d), r(ts.e), r(ts.f));

    if args.decompose {
        let dec = ts.decompose();
        println!("translate: {} {}", r(dec.translate.x), r(dec.translate.y));
        println!("rotate: {}", r(dec.rotate));
        println!("scale: {} {}", r(dec.scale.0), r(dec.scale.1));
        println!("skewX: {}", r(dec.skew_x));
    }

    for p in &args.points {
        let mapped = ts.apply(*p);
        println!("{},{} -> {},{}", p.x, p.y, r(mapped.x), r(mapped.y));
    }

    if let Some(ref vb) = args.view_box {
        let rect = svgfns::transform_view_box(vb, &ts);
        println!("viewBox: {}", svgfns::format_view_box(&rect, false));
    }

    Ok(())
}

const HELP: &str = "\
svgfns parses an SVG transform list and prints the resulting matrix.

USAGE:
  svgfns [OPTIONS] <TRANSFORM>

  svgfns 'translate(10 20) rotate(45)'
  svgfns --decompose 'matrix(1 2 3 4 5 6)'
  svgfns -p 1,1 -p 2,0 'rotate(90 1 1)'

OPTIONS:
      --help                    Prints this help
  -V, --version                 Prints version

  -p, --point X,Y               Maps a point through the matrix.
                                This option can be set multiple times
  --view-box RECT               Prints the bounding box of a transformed viewBox
                                Examples: '0 0 100 50', '0,0,100,50'
  --decompose                   Prints translate, rotate, scale and skewX parts

  --strict                      Fails on malformed transform functions
                                instead of skipping them
  --max-len LENGTH              Sets the transform list length limit in bytes
                                [default: 10000]
  --precision NUM               Rounds output numbers to NUM decimal places
                                [default: 6] [possible values: 0..15]

  --quiet                       Disables warnings
  --verbose                     Prints each parsed transform function

ARGS:
  <TRANSFORM>                   A transform attribute value
";

#[derive(Debug)]
struct Args {
    points: Vec<Point>,
    view_box: Option<Rect>,
    decompose: bool,
    strict: bool,
    max_len: usize,
    precision: u32,
    quiet: bool,
    verbose: bool,
    transform: String,
}

fn collect_args() -> Result<Args, pico_args::Error> {
    let mut input = pico_args::Arguments::from_env();

    if input.contains("--help") {
        print!("{}", HELP);
        std::process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    Ok(Args {
        points:     input.values_from_fn(["-p", "--point"], parse_point)?,
        view_box:   input.opt_value_from_fn("--view-box", parse_view_box)?,
        decompose:  input.contains("--decompose"),
        strict:     input.contains("--strict"),
        max_len:    input.opt_value_from_fn("--max-len", parse_max_len)?
            .unwrap_or(svgfns::MAX_TRANSFORM_LEN),
        precision:  input.opt_value_from_fn("--precision", parse_precision)?.unwrap_or(6),
        quiet:      input.contains("--quiet"),
        verbose:    input.contains("--verbose"),
        transform:  input.free_from_str()?,
    })
}

fn parse_point(s: &str) -> Result<Point, String> {
    let mut iter = s.splitn(2, ',');
    let mut next = || -> Result<f64, String> {
        iter.next()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("invalid point '{}'", s))
    };

    Ok(Point::new(next()?, next()?))
}

fn parse_view_box(s: &str) -> Result<Rect, String> {
    svgfns::parse_view_box(s).ok_or_else(|| format!("invalid viewBox '{}'", s))
}

fn parse_max_len(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| "invalid length")?;

    if n > 0 {
        Ok(n)
    } else {
        Err("LENGTH cannot be zero".to_string())
    }
}

fn parse_precision(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| "invalid number")?;

    if n <= 15 {
        Ok(n)
    } else {
        Err("precision out of bounds".to_string())
    }
}

fn round_to(n: f64, precision: u32) -> f64 {
    let k = 10f64.powi(precision as i32);
    let v = (n * k).round() / k;
    // Do not print `-0`.
    if v == 0.0 { 0.0 } else { v }
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, record.args()),
                log::Level::Warn  => eprintln!("Warning (in {}:{}): {}", target, line, record.args()),
                log::Level::Info  => eprintln!("Info (in {}:{}): {}", target, line, record.args()),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, record.args()),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, record.args()),
            }
        }
    }

    fn flush(&self) {}
}
