// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: target org alias
fn target_org_arg() -> Arg {
    Arg::new("target_org")
        .short('t')
        .long("target-org")
        .value_name("ALIAS")
        .help("Alias of the target org")
}

fn build_cli() -> Command {
    Command::new("orgsync")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Batch metadata sync and object-definition cleanup for Salesforce-style orgs")
        .subcommand(
            Command::new("pull")
                .about("Retrieve the org's metadata inventory in bounded batches")
                .arg(target_org_arg())
                .arg(
                    Arg::new("chunk_size")
                        .long("chunk-size")
                        .value_name("N")
                        .default_value("20")
                        .help("Maximum names per retrieval batch"),
                ),
        )
        .subcommand(
            Command::new("clone")
                .about("Install packages present in a source org but missing from a target org")
                .arg(
                    Arg::new("source_org")
                        .short('s')
                        .long("source-org")
                        .value_name("ALIAS")
                        .help("Alias of the source org"),
                )
                .arg(target_org_arg()),
        )
        .subcommand(
            Command::new("datamodel")
                .about("Strip Flexipage action overrides from retrieved object definitions")
                .arg(
                    Arg::new("pattern")
                        .long("pattern")
                        .value_name("GLOB")
                        .help("Glob pattern selecting the object-definition documents"),
                )
                .arg(
                    Arg::new("branch")
                        .short('b')
                        .long("branch")
                        .value_name("NAME")
                        .help("Create and switch to this git branch before rewriting"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("orgsync.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
