use clap::ValueEnum;
use mixtape_core::OutputFormat;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ReportArg {
    Summary,
    Table,
    Json,
}

impl From<ReportArg> for OutputFormat {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Summary => Self::Summary,
            ReportArg::Table => Self::Table,
            ReportArg::Json => Self::Json,
        }
    }
}
