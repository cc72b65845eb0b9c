use crate::config::ServerSection;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Linkstash - personal link bookmarking service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Address to bind the server to (default: 0.0.0.0:8080)
    #[arg(short, long, env = "LINKSTASH_ADDR")]
    pub addr: Option<String>,

    /// JSON file holding the stored links (default: links.json)
    #[arg(long, env = "LINKSTASH_LINKS_FILE")]
    pub links_file: Option<PathBuf>,

    /// Credentials file with one `username:password` per line (default: users.txt)
    #[arg(long, env = "LINKSTASH_USERS_FILE")]
    pub users_file: Option<PathBuf>,

    /// Where to redirect after a successful add, edit or delete (default: /)
    #[arg(long, env = "LINKSTASH_SERVICE_URL")]
    pub service_url: Option<String>,

    /// Directory with `list.hbs`, `add.hbs` or `edit.hbs` overriding the built-in pages
    #[arg(long, env = "LINKSTASH_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Page title shown on listings
    #[arg(long, env = "LINKSTASH_TITLE")]
    pub title: Option<String>,

    /// TOML config file (default: ~/.linkstash/config.toml, if present)
    #[arg(short, long, env = "LINKSTASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "LINKSTASH_LOG_JSON", default_value = "false")]
    pub log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "LINKSTASH_LOG_ROTATION", default_value = "daily")]
    pub log_rotation: String,

    /// Custom log directory (default: ~/.linkstash/logs)
    #[arg(long, env = "LINKSTASH_LOG_DIR")]
    pub log_dir: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a credentials-file line with a salted SHA-256 password
    HashPassword {
        /// User name to write in front of the colon
        username: String,
        /// Password to hash
        password: String,
    },
}

impl Args {
    /// Server settings given on the command line or through the environment.
    #[must_use]
    pub fn overrides(&self) -> ServerSection {
        ServerSection {
            addr: self.addr.clone(),
            links_file: self.links_file.clone(),
            users_file: self.users_file.clone(),
            service_url: self.service_url.clone(),
            templates_dir: self.templates_dir.clone(),
            title: self.title.clone(),
        }
    }
}

pub fn report_server_error(
    addr: std::net::SocketAddr,
    log_file: &std::path::Path,
    e: &std::io::Error,
) {
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!();
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of linkstash may already be running.");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  1. Kill the existing process:   pkill linkstash");
        eprintln!("  2. Use a different port:        linkstash --addr 0.0.0.0:8081");
        eprintln!("  3. Check what's using the port: lsof -i :{}", addr.port());
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return;
    }
    eprintln!();
    eprintln!("Error: Failed to start server: {e}");
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["linkstash"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.log_json);
        assert_eq!(args.log_rotation, "daily");
    }

    #[test]
    fn test_args_overrides_carry_cli_values() {
        let args = Args::try_parse_from([
            "linkstash",
            "--addr",
            "127.0.0.1:9000",
            "--links-file",
            "/tmp/links.json",
            "--service-url",
            "http://links.example.com",
        ])
        .unwrap();
        let overrides = args.overrides();
        assert_eq!(overrides.addr.as_deref(), Some("127.0.0.1:9000"));
        assert_eq!(overrides.links_file, Some(PathBuf::from("/tmp/links.json")));
        assert_eq!(
            overrides.service_url.as_deref(),
            Some("http://links.example.com")
        );
        assert!(overrides.users_file.is_none());
    }

    #[test]
    fn test_hash_password_subcommand() {
        let args = Args::try_parse_from(["linkstash", "hash-password", "josh", "s3cret"]).unwrap();
        match args.command {
            Some(Command::HashPassword { username, password }) => {
                assert_eq!(username, "josh");
                assert_eq!(password, "s3cret");
            }
            None => panic!("expected hash-password subcommand"),
        }
    }
}
