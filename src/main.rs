use log::info;
use gerono::{pyplot::Pyplot, render::render, sampler};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let s = sampler::sample();
    info!("sampled {} points", s.len());

    let mut plt = Pyplot::new()?;
    render(&mut plt, s.x(), s.y())?;
    plt.close()?;
    info!("done");
    Ok(())
}
