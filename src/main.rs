use anyhow::Result;

fn main() -> Result<()> {
    let code = gradebox::cli::run()?;
    std::process::exit(code);
}
