use crate::prompt::{HostInfo, Tip, Tips};
use chrono::NaiveDate;
use std::collections::HashMap;

pub(crate) fn map_env<'a, I>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub(crate) fn empty_env() -> HashMap<String, String> {
    HashMap::new()
}

/// A host snapshot that does not depend on the machine or the date.
pub(crate) fn fixed_host() -> HostInfo {
    HostInfo {
        os_type: "Linux".to_string(),
        os_locale: "en_US.UTF-8".to_string(),
        os_platform: "Linux-x86_64".to_string(),
        python_version: "3.12.4".to_string(),
        today: NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
    }
}

pub(crate) fn sample_tips() -> Tips {
    Tips::new(Tip::new("aipy", "You are an expert Python programmer.").with_short("Python agent"))
        .with_tip(Tip::new("plotting", "Label both axes."))
        .with_tip(Tip::new("files", "Write outputs to the current directory."))
}

pub(crate) fn role_only_tips() -> Tips {
    Tips::new(Tip::new("aipy", "You are an expert Python programmer."))
}
