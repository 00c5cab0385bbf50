fn main() -> anyhow::Result<()> {
    tincture::cli::run_cli()
}
