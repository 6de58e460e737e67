use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use aws_wire::QueryValue;

/// A process that can be suspended or resumed on an Auto Scaling group.
///
/// Names the service doesn't document (yet) are kept as [`ScalingProcess::Unknown`] instead of
/// being rejected, so newer process types still round trip.
///
/// Equality, ordering and hashing all go through [`ScalingProcess::as_str`], so an `Unknown`
/// holding a documented name is the same process as the named variant.
#[derive(Debug, Clone)]
pub enum ScalingProcess {
    Launch,
    Terminate,
    HealthCheck,
    ReplaceUnhealthy,
    AzRebalance,
    AlarmNotification,
    ScheduledActions,
    AddToLoadBalancer,
    InstanceRefresh,
    Unknown(String),
}

impl ScalingProcess {
    /// Every documented process type.
    pub const KNOWN: [ScalingProcess; 9] = [
        Self::Launch,
        Self::Terminate,
        Self::HealthCheck,
        Self::ReplaceUnhealthy,
        Self::AzRebalance,
        Self::AlarmNotification,
        Self::ScheduledActions,
        Self::AddToLoadBalancer,
        Self::InstanceRefresh,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Launch => "Launch",
            Self::Terminate => "Terminate",
            Self::HealthCheck => "HealthCheck",
            Self::ReplaceUnhealthy => "ReplaceUnhealthy",
            Self::AzRebalance => "AZRebalance",
            Self::AlarmNotification => "AlarmNotification",
            Self::ScheduledActions => "ScheduledActions",
            Self::AddToLoadBalancer => "AddToLoadBalancer",
            Self::InstanceRefresh => "InstanceRefresh",
            Self::Unknown(other) => other,
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    fn from_known(s: &str) -> Option<Self> {
        Self::KNOWN.into_iter().find(|known| known.as_str() == s)
    }
}

impl PartialEq for ScalingProcess {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ScalingProcess {}

impl PartialOrd for ScalingProcess {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScalingProcess {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Hash for ScalingProcess {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for ScalingProcess {
    fn from(value: &str) -> Self {
        Self::from_known(value).unwrap_or_else(|| Self::Unknown(value.to_owned()))
    }
}

impl From<String> for ScalingProcess {
    fn from(value: String) -> Self {
        Self::from_known(&value).unwrap_or(Self::Unknown(value))
    }
}

impl FromStr for ScalingProcess {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ScalingProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QueryValue for ScalingProcess {
    #[inline]
    fn write_query_value(&self, dst: &mut String) {
        dst.push_str(self.as_str());
    }
}
