use std::process::ExitCode;

use check_version_is::manifest::FsManifest;

fn main() -> anyhow::Result<ExitCode> {
    if let Err(e) = check_version_is::logging::init() {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let source = FsManifest::current_dir();
    let code = check_version_is::run(
        std::env::args_os(),
        &source,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );

    Ok(ExitCode::from(u8::try_from(code)?))
}
