//! hidl-doc - Pull the documentation out of HIDL interface files.

mod batch;
mod output;

use std::path::PathBuf;

use clap::Parser;
use diagnostic::{ASCIIEmitter, Emitter, FancyEmitter};

use crate::{batch::Batch, output::Output};

const INPUT_HELP: &str = "The .hal files to read. Each is parsed on its own, \
     in the order given.";

const PERMISSIVE_HELP: &str =
    "Keep going after problems which can be skipped. Redundant or misplaced \
     documentation comments are reported as warnings, and a file which fails \
     to parse is skipped instead of stopping the whole run.";

const OUTPUT_HELP: &str =
    "Write each file's JSON to DIR/<package>/<version>/<name>.json instead \
     of standard out.";

#[derive(clap::Parser)]
#[clap(author, version, about)]
pub struct Args {
    #[clap(required = true, value_name = "FILE", help = INPUT_HELP)]
    inputs: Vec<PathBuf>,

    /// Downgrade recoverable problems to warnings.
    #[clap(short, long, long_help = PERMISSIVE_HELP)]
    permissive: bool,

    /// Only check the input, don't write anything.
    #[clap(short, long)]
    lint: bool,

    /// Where to write the output.
    #[clap(short, long, value_name = "DIR", long_help = OUTPUT_HELP)]
    output: Option<PathBuf>,

    /// Print diagnostics as plain single lines.
    #[clap(long)]
    plain: bool,

    /// Don't use colour or box-drawing characters in diagnostics.
    #[clap(long, conflicts_with = "plain")]
    no_color: bool,
}

impl Args {
    fn options(&self) -> parser::Options {
        parser::Options {
            permissive: self.permissive,
            lint: self.lint,
        }
    }

    fn emitter(&self) -> Box<dyn Emitter> {
        if self.plain {
            Box::new(ASCIIEmitter::stderr())
        } else if self.no_color {
            Box::new(FancyEmitter::simpler())
        } else {
            Box::new(FancyEmitter::full())
        }
    }
}

fn main() {
    let args = Args::parse();

    let output = match &args.output {
        Some(dir) => Output::Directory(dir.clone()),
        None => Output::Stdout,
    };

    let mut batch = Batch::new(args.options(), output);
    batch.run(&args.inputs);

    let mut emitter = args.emitter();
    match batch.finish(emitter.as_mut()) {
        Ok(false) => {}
        Ok(true) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: cannot write diagnostics: {}", e);
            std::process::exit(1);
        }
    }
}
