use common::Result;
use experiment::{init_logger, run_experiment, Dirs};
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
struct Opt {
    /// How many copies of each raw file to stage as input
    #[structopt(name = "N")]
    n: usize,
}

fn main() -> Result<()> {
    init_logger();
    let opt = Opt::from_args();

    let elapsed = run_experiment(opt.n, &Dirs::under("."))?;
    println!("Tiempo de ejecución: {:.2} segundos", elapsed.as_secs_f64());

    Ok(())
}
