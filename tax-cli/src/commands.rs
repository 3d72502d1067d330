//! Terminal rendering for each subcommand.
//!
//! Every view is a `Display` wrapper so `main` only prints and tests compare
//! strings.

use std::fmt;

use rust_decimal::Decimal;
use tax_core::format::{format_inr, format_inr_whole};
use tax_core::{Regime, RegimeComparison, Relief, SavingsAdvisor, TaxBreakdown};
use tax_data::Analysis;

const LABEL_WIDTH: usize = 20;

fn relief_label(relief: Relief) -> &'static str {
    match relief {
        Relief::None => "none",
        Relief::FullRebate => "Section 87A rebate",
        Relief::MarginalRelief => "marginal relief",
    }
}

fn percent_label(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

fn amount_row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    amount: Decimal,
) -> fmt::Result {
    writeln!(f, "  {label:<LABEL_WIDTH$}₹{}", format_inr(amount))
}

/// Step-by-step figures of one calculation.
pub struct BreakdownView<'a>(pub &'a TaxBreakdown);

impl fmt::Display for BreakdownView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let b = self.0;
        writeln!(f, "{}", b.regime)?;
        amount_row(f, "Gross income", b.gross_income)?;
        amount_row(f, "Deductions", b.total_deductions)?;
        amount_row(f, "Taxable income", b.taxable_income)?;
        amount_row(f, "Slab tax", b.slab_tax)?;
        writeln!(f, "  {:<LABEL_WIDTH$}{}", "Relief", relief_label(b.relief))?;
        amount_row(f, "Income tax", b.income_tax)?;
        amount_row(
            f,
            &format!("Surcharge ({})", percent_label(b.surcharge_rate)),
            b.surcharge,
        )?;
        amount_row(f, "Cess (4%)", b.cess)?;
        write!(
            f,
            "  {:<LABEL_WIDTH$}₹{}",
            "Total tax",
            format_inr_whole(b.total)
        )
    }
}

/// Both regimes side by side, then the recommendation.
pub struct ComparisonView<'a>(pub &'a RegimeComparison);

impl fmt::Display for ComparisonView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let c = self.0;
        for regime in [Regime::New, Regime::Old] {
            writeln!(
                f,
                "{:<LABEL_WIDTH$}₹{}",
                format!("{regime} tax"),
                format_inr_whole(c.tax_for(regime))
            )?;
        }
        write!(f, "{c}")
    }
}

/// Numbered advice lines.
pub struct AdviceView<'a>(pub &'a [String]);

impl fmt::Display for AdviceView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (idx, line) in self.0.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {line}", idx + 1)?;
        }
        Ok(())
    }
}

/// Statement totals, regime comparison and advice for an analysis.
pub struct AnalysisView<'a> {
    pub analysis: &'a Analysis,
    pub age: u32,
    /// Regime currently filed under; drives the advice.
    pub regime: Regime,
}

impl fmt::Display for AnalysisView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let totals = &self.analysis.totals;
        writeln!(f, "Statement summary")?;
        amount_row(f, "Total income", totals.total_income)?;
        amount_row(f, "Total expenses", totals.expenses)?;
        amount_row(f, "Investments (80C)", totals.investments_80c)?;
        amount_row(f, "Medical (80D)", totals.medical_80d)?;
        writeln!(
            f,
            "  {:<LABEL_WIDTH$}{} ({} skipped)",
            "Transactions",
            self.analysis.transactions.len(),
            self.analysis.skipped
        )?;
        writeln!(f)?;

        let comparison = self.analysis.comparison(self.age);
        writeln!(f, "{}", ComparisonView(&comparison))?;
        writeln!(f)?;

        let advice = SavingsAdvisor::suggest(&self.analysis.profile(self.age, self.regime));
        writeln!(f, "Suggestions")?;
        write!(f, "{}", AdviceView(&advice))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tax_core::{FinancialProfile, TaxCalculator, TaxInput};
    use tax_data::{ManualCategory, ManualEntry};

    use super::*;

    // -----------------------------------------------------------------------
    // BreakdownView
    // -----------------------------------------------------------------------

    #[test]
    fn breakdown_lists_every_step() {
        let input = TaxInput::new(dec!(1200000), Regime::Old)
            .with_investments_80c(dec!(150000))
            .with_medical_80d(dec!(25000));

        let rendered = BreakdownView(&TaxCalculator::breakdown(&input)).to_string();

        assert_eq!(
            rendered,
            "Old Regime\n\
             \x20 Gross income        ₹12,00,000.00\n\
             \x20 Deductions          ₹2,25,000.00\n\
             \x20 Taxable income      ₹9,75,000.00\n\
             \x20 Slab tax            ₹1,07,500.00\n\
             \x20 Relief              none\n\
             \x20 Income tax          ₹1,07,500.00\n\
             \x20 Surcharge (0%)      ₹0.00\n\
             \x20 Cess (4%)           ₹4,300.00\n\
             \x20 Total tax           ₹1,11,800"
        );
    }

    #[test]
    fn breakdown_names_the_rebate() {
        let input = TaxInput::new(dec!(1275000), Regime::New);

        let rendered = BreakdownView(&TaxCalculator::breakdown(&input)).to_string();

        assert!(rendered.contains("Relief              Section 87A rebate"));
        assert!(rendered.ends_with("₹0"));
    }

    #[test]
    fn breakdown_shows_surcharge_rate() {
        let input = TaxInput::new(dec!(6000000), Regime::New);

        let rendered = BreakdownView(&TaxCalculator::breakdown(&input)).to_string();

        assert!(rendered.contains("Surcharge (10%)"));
    }

    // -----------------------------------------------------------------------
    // ComparisonView / AdviceView
    // -----------------------------------------------------------------------

    #[test]
    fn comparison_shows_both_taxes_and_recommendation() {
        let profile = FinancialProfile {
            total_income: dec!(1000000),
            regime: Regime::Old,
            ..FinancialProfile::default()
        };

        let rendered = ComparisonView(&RegimeComparison::compare(&profile)).to_string();

        assert_eq!(
            rendered,
            "New Regime tax      ₹0\n\
             Old Regime tax      ₹1,06,600\n\
             Recommendation: Choose New Regime. Save ₹1,06,600"
        );
    }

    #[test]
    fn advice_is_numbered() {
        let advice = vec!["first".to_string(), "second".to_string()];

        assert_eq!(AdviceView(&advice).to_string(), "1. first\n2. second");
    }

    // -----------------------------------------------------------------------
    // AnalysisView
    // -----------------------------------------------------------------------

    #[test]
    fn analysis_view_combines_summary_comparison_and_advice() {
        let mut analysis = Analysis::default();
        analysis.add_manual_entries(&[ManualEntry {
            description: "Salary".to_string(),
            amount: dec!(1000000),
            category: ManualCategory::Income,
        }]);

        let rendered = AnalysisView {
            analysis: &analysis,
            age: 30,
            regime: Regime::New,
        }
        .to_string();

        assert!(rendered.starts_with("Statement summary\n"));
        assert!(rendered.contains("Total income        ₹10,00,000.00"));
        assert!(rendered.contains("Transactions        1 (0 skipped)"));
        assert!(rendered.contains("Recommendation: Choose New Regime. Save ₹1,06,600"));
        assert!(rendered.ends_with("Suggestions\n1. You're already optimized! Keep up the good tax planning."));
    }
}
