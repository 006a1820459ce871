//! Content tables for the landing page that feed the motion layer.

use std::time::Duration;

use crate::jobs::TickerId;
use crate::motion::{Marquee, StackingCards, StaggerList};
use crate::stage::Stage;
use crate::ticker::TickerSpec;

/// Stagger between neighbouring stat counters.
pub const STAT_STAGGER: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatItem {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [StatItem; 3] = [
    StatItem {
        value: "200+",
        label: "Projects Delivered",
    },
    StatItem {
        value: "98%",
        label: "Client Satisfaction",
    },
    StatItem {
        value: "50+",
        label: "Happy Clients",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        step: "01",
        title: "Subscribe",
        desc: "Choose a plan and subscribe.",
    },
    ProcessStep {
        step: "02",
        title: "Request",
        desc: "Submit unlimited requests.",
    },
    ProcessStep {
        step: "03",
        title: "Receive",
        desc: "Get designs in 48 hours.",
    },
    ProcessStep {
        step: "04",
        title: "Revise",
        desc: "Unlimited revisions included.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "FAST DELIVERY",
        desc: "Projects delivered in weeks, not months.",
    },
    Service {
        title: "FIXED PRICING",
        desc: "No surprises. One flat monthly rate.",
    },
    Service {
        title: "TOP QUALITY",
        desc: "Premium design from experienced pros.",
    },
];

/// Ticker specs for the stats strip, each one `STAT_STAGGER` after the last.
pub fn stat_specs() -> Vec<TickerSpec> {
    STATS
        .iter()
        .enumerate()
        .map(|(i, stat)| TickerSpec::new(stat.value).delay(STAT_STAGGER * i as u32))
        .collect()
}

/// Mount the stats strip on `stage`, returning ids in display order.
pub fn mount_stats(stage: &mut Stage) -> Vec<TickerId> {
    stat_specs().into_iter().map(|spec| stage.mount(spec)).collect()
}

pub fn services_list() -> StaggerList {
    StaggerList::new(SERVICES.len())
}

pub fn process_cards() -> StackingCards {
    StackingCards::new(PROCESS_STEPS.len())
}

pub fn project_carousel() -> Marquee {
    Marquee::PROJECTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_specs_are_staggered() {
        let specs = stat_specs();
        let delays: Vec<_> = specs.iter().map(|s| s.start_delay).collect();
        assert_eq!(
            delays,
            vec![
                Duration::ZERO,
                Duration::from_millis(200),
                Duration::from_millis(400)
            ]
        );
        assert_eq!(specs[1].display_value, "98%");
    }

    #[test]
    fn test_mount_stats() {
        let mut stage = Stage::new();
        let ids = mount_stats(&mut stage);
        let texts: Vec<_> = ids.iter().filter_map(|id| stage.text(*id)).collect();
        assert_eq!(texts, vec!["0+", "0%", "0+"]);
    }

    #[test]
    fn test_section_sizes() {
        assert_eq!(services_list().len(), 3);
        assert_eq!(process_cards().len(), 4);
    }
}
