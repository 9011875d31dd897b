use std::fmt;

use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel};

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let origin = if self.exists { "" } else { " (not found)" };
        writeln!(f, "Config file:  {}{}", self.path, origin)?;
        writeln!(f, "endpoint:     {}", self.endpoint)?;
        writeln!(f, "page_size:    {}", self.page_size)?;
        writeln!(f, "timeout_secs: {}", self.timeout_secs)
    }
}

impl fmt::Display for ConfigInitViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.path)
    }
}
