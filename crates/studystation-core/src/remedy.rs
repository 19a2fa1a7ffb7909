//! Mood first-aid lookup.
//!
//! A fixed table mapping nine mental states to a short, actionable
//! prescription. Read-only reference data, nothing persisted.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Prescription {
    pub mood: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub action: &'static str,
}

pub const PRESCRIPTIONS: [Prescription; 9] = [
    Prescription {
        mood: "anxious",
        icon: "🌪️",
        title: "4-7-8 breathing (cool the brain down)",
        content: "Anxiety overheats the brain. Forcing a slow breathing rhythm tells the \
                  parasympathetic system that you are safe right now.\n\n\
                  1. Inhale through the nose for 4 seconds\n\
                  2. Hold for 7 seconds\n\
                  3. Exhale slowly through the mouth for 8 seconds",
        action: "Close your eyes and run 4 full cycles.",
    },
    Prescription {
        mood: "exhausted",
        icon: "🔋",
        title: "20-minute power nap",
        content: "Too much adenosine has piled up; grinding on at zero efficiency is \
                  pointless. You need a system reboot.\n\n\
                  Set a 20-minute alarm. Past 30 minutes you hit deep sleep and wake up \
                  groggier than before.",
        action: "Lie down, phone on airplane mode, alarm set.",
    },
    Prescription {
        mood: "procrastinating",
        icon: "🐢",
        title: "5-minute starter ritual",
        content: "The brain is not resisting studying, it is resisting the pain of \
                  starting.\n\n\
                  Trick it: \"I will only do 5 minutes, and I can quit after that.\" \
                  Once started, you usually keep going.",
        action: "Open the book, set a 5-minute timer, start now.",
    },
    Prescription {
        mood: "lost",
        icon: "🌫️",
        title: "Free writing (empty the head)",
        content: "Feeling lost is information overload. Take a sheet of paper and write \
                  every thought without lifting the pen. Ignore handwriting, logic and \
                  grammar.\n\n\
                  Dump the clutter out and the road becomes visible.",
        action: "Grab a blank sheet and fill it completely.",
    },
    Prescription {
        mood: "overwhelmed",
        icon: "💥",
        title: "5-4-3-2-1 grounding",
        content: "When emotion is about to flood you, use the senses to pull yourself \
                  back into the room:\n\n\
                  👀 name 5 things you can see\n\
                  ✋ touch 4 things\n\
                  👂 notice 3 sounds\n\
                  👃 find 2 smells\n\
                  👅 find 1 taste",
        action: "Deep breath, then find 5 colored objects in front of you.",
    },
    Prescription {
        mood: "jealous",
        icon: "👀",
        title: "Lane switching",
        content: "You are reading someone else's exam sheet, so there is no time to \
                  write your own.\n\n\
                  Jealousy is a distorted signal that you want to improve. Their success \
                  subtracts nothing from your score; you are in different lanes.",
        action: "Write down one way today-you beat yesterday-you.",
    },
    Prescription {
        mood: "insecure",
        icon: "📉",
        title: "Victory log",
        content: "The brain has a built-in negativity bias and forgets your wins. Save \
                  them manually.\n\n\
                  A win does not require a perfect score. Getting out of bed counts.",
        action: "Open a notebook and list 3 small things you did well this week.",
    },
    Prescription {
        mood: "sleepless",
        icon: "🌙",
        title: "Body scan",
        content: "You cannot sleep because the body is still tense.\n\n\
                  Picture a light sweeping slowly upward from your toes, relaxing every \
                  muscle it passes. Toes... ankles... calves... knees...",
        action: "Lie still and start by relaxing your toes.",
    },
    Prescription {
        mood: "angry",
        icon: "🔥",
        title: "Write and burn",
        content: "Anger carries a lot of energy. Do not suppress it, release it.\n\n\
                  Write down everything that made you furious, foul language welcome. \
                  Then tear the page to shreds and throw it away.",
        action: "Write it down, then rip it up hard!",
    },
];

/// Look up a prescription by mood name, case-insensitively.
pub fn find(mood: &str) -> Option<&'static Prescription> {
    let needle = mood.trim();
    PRESCRIPTIONS
        .iter()
        .find(|p| p.mood.eq_ignore_ascii_case(needle))
}

/// All known mood names, in table order.
pub fn moods() -> impl Iterator<Item = &'static str> {
    PRESCRIPTIONS.iter().map(|p| p.mood)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_nine_moods() {
        assert_eq!(PRESCRIPTIONS.len(), 9);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(find("Anxious").is_some());
        assert!(find("  SLEEPLESS ").is_some());
        assert!(find("bored").is_none());
    }

    #[test]
    fn every_entry_has_an_action() {
        for p in &PRESCRIPTIONS {
            assert!(!p.action.is_empty(), "{} has no action", p.mood);
            assert!(!p.title.is_empty());
        }
    }

    #[test]
    fn mood_names_are_unique() {
        let mut names: Vec<_> = moods().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PRESCRIPTIONS.len());
    }
}
