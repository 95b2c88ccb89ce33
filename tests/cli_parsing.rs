//! Tests for command-line parsing.

use clap::Parser;
use csv_convert::config::{Cli, Command, Locale, DEFAULT_ROLES_HEADER, DEFAULT_TABLE_NAME};
use csv_convert::ExportFormat;
use std::path::PathBuf;

#[test]
fn test_serve_defaults() {
    let cli = Cli::try_parse_from(["csv_convert", "serve"]).expect("serve should parse");
    let Command::Serve(args) = cli.command else {
        panic!("expected the serve subcommand");
    };
    assert_eq!(args.bind, "127.0.0.1:8080");
    assert_eq!(args.base_path, "");
    assert_eq!(args.roles_header, DEFAULT_ROLES_HEADER);
    assert_eq!(args.table, DEFAULT_TABLE_NAME);
    assert_eq!(args.locale, Locale::Ca);
}

#[test]
fn test_export_options() {
    let cli = Cli::try_parse_from([
        "csv_convert",
        "export",
        "--db-path",
        "forms.db",
        "--format",
        "xlsx",
        "--output",
        "dades.xlsx",
        "--table",
        "equipaments",
    ])
    .expect("export should parse");
    let Command::Export(args) = cli.command else {
        panic!("expected the export subcommand");
    };
    assert_eq!(args.db_path, PathBuf::from("forms.db"));
    assert_eq!(args.format, ExportFormat::Xlsx);
    assert_eq!(args.output, Some(PathBuf::from("dades.xlsx")));
    assert_eq!(args.table, "equipaments");
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(Cli::try_parse_from(["csv_convert", "export", "--format", "pdf"]).is_err());
    assert!(Cli::try_parse_from(["csv_convert", "serve", "--locale", "fr"]).is_err());
    assert!(Cli::try_parse_from(["csv_convert", "serve", "--log-level", "loud"]).is_err());
    assert!(Cli::try_parse_from(["csv_convert", "serve", "--max-connections", "-1"]).is_err());
}
