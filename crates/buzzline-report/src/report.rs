use std::io::{self, Write};
use std::ops::RangeInclusive;

use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;

use crate::process::ProcessInfo;
use crate::sample::{random_number, random_word};

/// Number of sample items in the "Random Data" block.
pub const ITEM_COUNT: usize = 3;
/// Bounds of the number attached to each sample item.
pub const ITEM_RANGE: RangeInclusive<i64> = 100..=999;

const BANNER: [&str; 3] = [
    "╔════════════════════════════════════════════════════════════════╗",
    "║                  Demo Report: Rust Runtime                     ║",
    "╚════════════════════════════════════════════════════════════════╝",
];

/// One rendering of the demo report with all random slots already drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub process: ProcessInfo,
    pub type_safety: &'static str,
    pub performance: &'static str,
    pub compilation: &'static str,
    pub items: [(&'static str, i64); ITEM_COUNT],
}

impl Report {
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        timestamp: DateTime<Utc>,
        process: ProcessInfo,
    ) -> Self {
        let status = random_word(rng);
        let type_safety = random_word(rng);
        let performance = random_word(rng);
        let compilation = random_word(rng);
        let items = std::array::from_fn(|_| {
            let word = random_word(rng);
            let number = random_number(rng, *ITEM_RANGE.start(), *ITEM_RANGE.end());
            (word, number)
        });

        Self {
            status,
            timestamp,
            process,
            type_safety,
            performance,
            compilation,
            items,
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in BANNER {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;

        writeln!(out, "🔵 Rust Execution")?;
        writeln!(out, "   Language: Rust")?;
        writeln!(out, "   Runtime: native")?;
        writeln!(out, "   Status: {}", self.status)?;
        writeln!(out)?;

        writeln!(out, "📊 Execution Details")?;
        writeln!(
            out,
            "   Timestamp: {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
        )?;
        writeln!(out, "   Process ID: {}", self.process.pid)?;
        writeln!(out, "   Memory: {}MB", self.process.memory_mb)?;
        writeln!(out)?;

        writeln!(out, "✨ Rust Features")?;
        writeln!(out, "   Type Safety: {}", self.type_safety)?;
        writeln!(out, "   Performance: {}", self.performance)?;
        writeln!(out, "   Compilation: {}", self.compilation)?;
        writeln!(out)?;

        writeln!(out, "🎯 Random Data")?;
        for (i, (word, number)) in self.items.iter().enumerate() {
            writeln!(out, "   Item {}: {word} ({number})", i + 1)?;
        }
        writeln!(out)?;

        writeln!(out, "✅ Demo Report Completed Successfully!")?;
        writeln!(out)?;
        out.flush()
    }
}

/// Prints a freshly drawn report to standard output.
pub fn emit_report() {
    let report = Report::generate(
        &mut rand::thread_rng(),
        Utc::now(),
        ProcessInfo::current(),
    );
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let _ = report.write_to(&mut lock);
}
