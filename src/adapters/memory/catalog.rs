//! Built-in catalogs
//!
//! The daily tasks, challenges and leaderboard the dashboard ships with.

use crate::core::models::{Challenge, Icon, Leaderboard, LeaderboardEntry, MetricDeltas, Task};

/// The default daily tasks, in display order
#[must_use]
pub fn default_tasks() -> Vec<Task> {
    vec![
        Task::new(
            "1",
            "Zero Waste Day",
            "Go through entire day without generating any non-recyclable waste",
            100,
        )
        .with_icon(Icon::Trash)
        .with_metrics(MetricDeltas::none().with_water_saved(50)),
        Task::new(
            "2",
            "Public Transport Usage",
            "Use public transportation instead of personal vehicle",
            75,
        )
        .with_icon(Icon::Train)
        .with_metrics(MetricDeltas::none().with_carbon_score(30)),
        Task::new(
            "3",
            "Carpooling Initiative",
            "Share your ride with at least one other person",
            50,
        )
        .with_icon(Icon::Car)
        .with_metrics(MetricDeltas::none().with_carbon_score(20)),
        Task::new("4", "Plastic-Free Day", "Avoid using any single-use plastics today", 85)
            .with_icon(Icon::Ban)
            .with_metrics(MetricDeltas::none().with_water_saved(30).with_trees_saved(1)),
        Task::new(
            "5",
            "Carbon Emission Check",
            "Calculate and log your daily carbon emissions",
            60,
        )
        .with_icon(Icon::Leaf)
        .with_metrics(MetricDeltas::none().with_carbon_score(25)),
    ]
}

fn challenge(
    id: &str,
    title: &str,
    description: &str,
    points: u32,
    duration: &str,
    progress: u32,
    icon: Icon,
) -> Challenge {
    Challenge {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        points,
        duration: duration.to_string(),
        progress,
        completed: false,
        icon,
    }
}

/// The default challenges
#[must_use]
pub fn default_challenges() -> Vec<Challenge> {
    vec![
        challenge(
            "1",
            "Eco Streak Master",
            "Maintain a 7-day streak of completing daily eco-tasks",
            500,
            "7 days",
            2,
            Icon::Star,
        ),
        challenge(
            "2",
            "Monthly Green Goals",
            "Complete all daily tasks for an entire month",
            1000,
            "30 days",
            15,
            Icon::Calendar,
        ),
        challenge(
            "3",
            "Carbon Saver Milestone",
            "Reduce carbon footprint by 100kg through various activities",
            750,
            "Ongoing",
            45,
            Icon::Medal,
        ),
    ]
}

const AVATAR_A: &str = "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=100&h=100&q=80";
const AVATAR_B: &str = "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&w=100&h=100&q=80";
const AVATAR_C: &str = "https://images.unsplash.com/photo-1599566150163-29194dcaad36?auto=format&fit=crop&w=100&h=100&q=80";
const AVATAR_D: &str = "https://images.unsplash.com/photo-1527980965255-d3b416303d12?auto=format&fit=crop&w=100&h=100&q=80";

/// The default leaderboard; the first entry is the current user
#[must_use]
pub fn default_leaderboard() -> Leaderboard {
    let rows = [
        ("sarah@", 2500, AVATAR_A),
        ("girija", 2350, AVATAR_B),
        ("venkatesh", 2200, AVATAR_C),
        ("sinchana", 2100, AVATAR_A),
        ("kaleem", 2000, AVATAR_C),
        ("tarun", 1900, AVATAR_D),
        ("saleem", 1800, AVATAR_C),
    ];

    let entries = rows
        .iter()
        .zip(1u32..)
        .map(|(&(name, score, avatar), rank)| LeaderboardEntry {
            id: rank.to_string(),
            name: name.to_string(),
            score,
            rank,
            avatar: avatar.to_string(),
            is_current_user: rank == 1,
        })
        .collect();

    Leaderboard::new(entries)
}
