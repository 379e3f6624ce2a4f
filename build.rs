use clap::IntoApp;
use clap_generate::{
    generate_to,
    generators::{Bash, Fish, Zsh},
    Generator,
};
use std::{env, fs, io::Result, path::Path};

include!("src/cli.rs");

const DEFAULT_ROOT: &str = "completions";
const APP: &str = "vercmp";
const GEN_ENV: &str = "VERCMP_GEN_COMPLETIONS";

fn generate<G: Generator>(shell: G, root: &Path) -> Result<()> {
    let mut app = Opts::into_app();
    let path = generate_to(shell, &mut app, APP, root)?;
    println!("cargo:warning=generated {}", path.display());

    Ok(())
}

/// Write bash, zsh and fish completions into `root`
fn generate_completions(root: &Path) -> Result<()> {
    fs::create_dir_all(root)?;
    generate(Bash, root)?;
    generate(Zsh, root)?;
    generate(Fish, root)?;

    Ok(())
}

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-env-changed={}", GEN_ENV);

    // an empty value means the default directory
    if let Ok(root) = env::var(GEN_ENV) {
        let root = if root.is_empty() {
            DEFAULT_ROOT.to_owned()
        } else {
            root
        };
        generate_completions(Path::new(&root))?;
    }

    Ok(())
}
