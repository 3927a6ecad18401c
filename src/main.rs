use clap::Parser;
use log::{debug, warn};
use tally::{
    evaluate,
    render::{format_result, render},
};

/// tally evaluates infix arithmetic expressions such as `3 * (4 + 5)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints only the result instead of drawing the expression box.
    #[arg(short, long)]
    plain: bool,

    /// The expression to evaluate. Multiple words are joined with single
    /// spaces, so quoting is optional.
    #[arg(allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.expression.is_empty() {
        println!("Tally calculator");
        println!("Usage: tally \"<expression>\"");
        println!("Example: tally \"3 + 5\"");
        return;
    }

    let expression = args.expression.join(" ");
    debug!("evaluating {expression:?}");

    match evaluate(&expression) {
        Ok(result) => {
            debug!("{expression:?} evaluated to {result:?}");
            let formatted = format_result(result);
            if args.plain {
                println!("{formatted}");
            } else {
                println!("{}", render(&expression, &formatted));
            }
        },
        Err(e) => {
            warn!("failed to evaluate {expression:?}: {e}");
            println!("Error: {e}");
        },
    }
}
