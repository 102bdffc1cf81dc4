// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

use crate::config::HarvestConfig;
use crate::hiring::{FileNaming, SortOrder};

#[derive(Debug, Parser)]
#[command(name = "resume-harvester")]
#[command(about = "Download candidate resumes from BambooHR hiring")]
pub struct HarvestCli {
    /// Email address of the user
    #[arg(short = 'u', long = "user")]
    pub user: String,

    /// Password of the user (prompted when omitted)
    #[arg(short = 'p', long = "password")]
    pub password: Option<String>,

    /// Number of candidates to query
    #[arg(short = 'n', long = "limit")]
    pub limit: Option<u32>,

    /// Offset into the candidate list
    #[arg(long)]
    pub offset: Option<u32>,

    /// Sort order of the candidate list
    #[arg(long, value_enum)]
    pub sort: Option<SortOrder>,

    /// Subdomain in BambooHR [<subdomain>.bamboohr.com]
    #[arg(long)]
    pub subdomain: Option<String>,

    /// Directory to save the resumes to
    #[arg(long = "dl")]
    pub download_dir: Option<PathBuf>,

    /// Keep the uploaded file names instead of <First>-<Last>-<Rating>-[<Position>]
    #[arg(long)]
    pub original_names: bool,

    /// YAML configuration file (defaults to ./harvest.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl HarvestCli {
    /// Flags win over the file and environment.
    pub fn apply_to(&self, config: &mut HarvestConfig) {
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        if let Some(offset) = self.offset {
            config.offset = offset;
        }
        if let Some(sort) = self.sort {
            config.sort_order = sort;
        }
        if let Some(subdomain) = &self.subdomain {
            config.subdomain = subdomain.clone();
        }
        if let Some(dir) = &self.download_dir {
            config.download_dir = dir.clone();
        }
        if self.original_names {
            config.naming = FileNaming::Original;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = HarvestCli::parse_from([
            "resume-harvester",
            "-u",
            "hr@example.com",
            "-n",
            "20",
            "--sort",
            "asc",
            "--subdomain",
            "acme",
            "--dl",
            "/tmp/resumes",
            "--original-names",
        ]);
        let mut config = HarvestConfig::default();
        cli.apply_to(&mut config);

        assert_eq!(cli.user, "hr@example.com");
        assert_eq!(cli.password, None);
        assert_eq!(config.limit, 20);
        assert_eq!(config.offset, 0);
        assert_eq!(config.sort_order, SortOrder::Asc);
        assert_eq!(config.subdomain, "acme");
        assert_eq!(config.download_dir, PathBuf::from("/tmp/resumes"));
        assert_eq!(config.naming, FileNaming::Original);
    }

    #[test]
    fn test_user_is_required() {
        assert!(HarvestCli::try_parse_from(["resume-harvester", "-n", "5"]).is_err());
    }
}
