//! Pre-written operational answers.
//!
//! Served whenever the completion endpoint cannot be reached. Matching is
//! a substring scan of the lowercased question against a fixed priority
//! list; the first hit wins, so a question carrying several keywords gets
//! the earliest block.

const FDP_LIMITS: &str = r#"Based on FAA Part 117 and the Phantom Airlines PWA:

The maximum Flight Duty Period (FDP) for a pilot depends on several factors:

| Factor | Details |
|--------|---------|
| **Report Time** | FDP limits vary by start time per FAA Part 117 |
| **0500-0659 local** | 13 hours maximum |
| **0700-1159 local** | 14 hours maximum |
| **1200-1259 local** | 13 hours maximum |
| **1300-1659 local** | 12 hours maximum |
| **Number of Segments** | More segments reduce max FDP by 30-60 min each |
| **PWA 5.1** | Pilots may not exceed 6 consecutive duty days |

**Citation:** FAA 14 CFR Part 117.11, PWA Section 5.1"#;

const MONTHLY_HOURS: &str = r#"### Monthly and Annual Flight Time Limits

| Limit | Value | Source |
|-------|-------|--------|
| Monthly flight time | 100 hours | FAA Part 117.23 |
| Annual flight time | 1,000 hours | FAA Part 117.23 |

A pilot who has flown 95 hours this month has 5 hours remaining and may not
accept a trip whose block time exceeds that margin.

**Citation:** FAA 14 CFR Part 117.23"#;

const CONSECUTIVE_DAYS: &str = r#"### Consecutive Duty Day Limits

**PWA 5.1 Consecutive Duty Days**
- Maximum 6 consecutive duty days
- Followed by minimum 24 hours off

A pilot reaching the 6-day limit must receive the full rest block before
accepting another assignment.

**Citation:** PWA Section 5.1"#;

const REST_REQUIREMENTS: &str = r#"### Minimum Rest Requirements

| Requirement | Value | Source |
|-------------|-------|--------|
| Rest between duty periods | 10 hours minimum | FAA Part 117.25 |
| Rest after 6 consecutive duty days | 24 hours minimum | PWA Section 5.1 |

The 10-hour rest period must include an 8-hour uninterrupted sleep
opportunity.

**Citation:** FAA 14 CFR Part 117.25, PWA Section 5.1"#;

const RESERVE_CALLOUT: &str = r#"### Reserve Call-Out Rules

**PWA 5.2 Reserve Call-Out**
- Short-call reserve: Minimum 2 hours notice
- Long-call reserve: Minimum 12 hours notice

A call-out with less notice than the applicable minimum may be refused
without penalty.

**Citation:** PWA Section 5.2"#;

const GHOST_FLIGHTS: &str = r#"### Ghost Flights Detection

Currently detecting **5 ghost flights**:

| Flight | Issue | Captain | Aircraft Location | Captain Location |
|--------|-------|---------|------------------|------------------|
| PH1234 | 🔴 Location mismatch | J. Smith | ATL | ORD |
| PH3456 | 🔴 Location mismatch | M. Johnson | DTW | ATL |
| PH5678 | 🟡 Terminal mismatch | R. Davis | MSP T1 | MSP T2 |
| PH7890 | 🔴 Location mismatch | K. Wilson | JFK | BOS |
| PH2345 | 🔴 Location mismatch | A. Brown | LAX | SFO |

**Estimated Impact:** $125,000 if unresolved"#;

const DISRUPTION_COSTS: &str = r#"### Today's Disruption Costs

**Total Estimated Cost: $2.32M**

| Category | Amount |
|----------|--------|
| Direct Disruption | $1.45M |
| Passenger Compensation | $520K |
| Crew Repositioning | $180K |
| Cascading Impact | $170K |

**By Disruption Type:**
| Type | Cost | % of Total |
|------|------|------------|
| Weather | $1.27M | 55% |
| Mechanical | $450K | 19% |
| Crew | $320K | 14% |
| ATC | $280K | 12% |"#;

const RULE_REFERENCE: &str = r#"### Contract Rule Reference

| Rule ID | Category | Name | Key Limit |
|---------|----------|------|-----------|
| FAA-117-1 | FAA | Max Flight Duty Period | 9-14 hours |
| FAA-117-2 | FAA | Minimum Rest | 10 hours |
| FAA-117-3 | FAA | Monthly Limit | 100 hours |
| FAA-117-4 | FAA | Annual Limit | 1,000 hours |
| PWA-5.1 | UNION | Consecutive Days | 6 days |
| PWA-5.2 | UNION | Reserve Notice | 2 hours |
| PWA-6.1 | UNION | Deadhead Rules | 14 hours total |
| PWA-7.1 | UNION | Type Qualification | Required |
| PWA-8.1 | UNION | Involuntary Extension | 2 hours max |"#;

const OTP_TODAY: &str = r#"### Today's On-Time Performance

| Metric | Value |
|--------|-------|
| **OTP** | 82.4% |
| **Total Flights** | 1,423 |
| **On-Time Departures** | 1,172 |
| **Delayed** | 156 (11.0%) |
| **Cancelled** | 34 (2.4%) |

**Trend:** OTP is down 3.2% from yesterday due to weather in Atlanta.

**Key Factors:**
- ATL thunderstorms: -2.1% impact
- JFK ATC delays: -0.8% impact
- MSP snow: -0.3% impact"#;

const ACTIVE_DISRUPTIONS: &str = r#"### Active Disruptions Summary

Currently tracking **24 active disruptions**:

| Severity | Count | Est. Cost |
|----------|-------|-----------|
| 🔴 Critical | 3 | $1.27M |
| 🟠 Severe | 7 | $580K |
| 🟡 Moderate | 9 | $320K |
| 🟢 Minor | 5 | $85K |

**Top 3 by Impact:**
1. **ATL Thunderstorms** - 45 flights, 4,500 pax, $850K
2. **ATL Tornado Warning** - 23 flights, 2,100 pax, $420K
3. **JFK ATC Delays** - 12 flights, 1,200 pax, $180K"#;

const CREW_AVAILABILITY: &str = r#"### Crew Availability Summary

**Network-wide:**
- Available Captains: **156**
- Available First Officers: **234**
- Crew Near Monthly Limit: **23**

**By Hub:**
| Hub | Captains | First Officers |
|-----|----------|----------------|
| ATL | 45 | 62 |
| DTW | 23 | 31 |
| MSP | 18 | 28 |
| JFK | 28 | 35 |
| LAX | 22 | 38 |

**Alert:** 8 flights currently need captains, 4 need first officers."#;

const HISTORICAL_INCIDENTS: &str = r#"### Historical Incident Analysis

Based on current disruptions, I found **3 similar historical events**:

**1. Winter Storm Elliott (Dec 2022)** - 87% similarity
- Duration: 96 hours | Flights Cancelled: 2,500 | Cost: $45M

**2. CrowdStrike Outage (Jul 2024)** - 72% similarity
- Duration: 120 hours | Flights Cancelled: 4,000 | Cost: $85M

**3. B737 Fleet AD (Aug 2023)** - 65% similarity
- Duration: 72 hours | Flights Cancelled: 1,200 | Cost: $25M

**Recommended Strategy:** Apply Winter Storm Elliott playbook"#;

/// Keyword groups in priority order; the first group with a hit answers.
static KEYWORD_ANSWERS: &[(&[&str], &str)] = &[
    (&["duty", "fdp"], FDP_LIMITS),
    (&["monthly", "hours"], MONTHLY_HOURS),
    (&["consecutive"], CONSECUTIVE_DAYS),
    (&["rest"], REST_REQUIREMENTS),
    (&["reserve", "notice"], RESERVE_CALLOUT),
    (&["ghost"], GHOST_FLIGHTS),
    (&["cost"], DISRUPTION_COSTS),
    (&["contract", "pwa", "faa"], RULE_REFERENCE),
    (&["otp", "on-time", "on time"], OTP_TODAY),
    (&["disruption"], ACTIVE_DISRUPTIONS),
    (&["crew", "captain"], CREW_AVAILABILITY),
    (&["historical", "similar"], HISTORICAL_INCIDENTS),
];

/// The canned answer for `question`.
pub fn answer(question: &str) -> String {
    let lowered = question.to_lowercase();

    for (keywords, block) in KEYWORD_ANSWERS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return (*block).to_string();
        }
    }

    help_block(question)
}

fn help_block(question: &str) -> String {
    format!(
        r#"I understand you're asking about: "{question}"

Based on the current state of the network:
- **Network Health:** 87.3%
- **Active Disruptions:** 24
- **Ghost Flights:** 5
- **Flights Needing Crew:** 12

I can help with flight status, disruptions, crew availability, duty and rest
rules, historical patterns, and cost estimation."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duty_questions_get_the_fdp_table_verbatim() {
        let reply = answer("What is the maximum flight duty period for a pilot starting at 6am?");
        assert_eq!(reply, FDP_LIMITS);
        assert!(reply.contains("0700-1159 local"));
    }

    #[test]
    fn earlier_keywords_win_on_multi_keyword_questions() {
        // Carries both "consecutive" and "rest"; "consecutive" is earlier.
        let reply = answer("How many consecutive days can a pilot work before required rest?");
        assert_eq!(reply, CONSECUTIVE_DAYS);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(answer("Any GHOST flights right now?"), GHOST_FLIGHTS);
        assert_eq!(answer("what is our OTP?"), OTP_TODAY);
    }

    #[test]
    fn cost_questions_beat_the_disruption_block() {
        let reply = answer("What is the estimated cost of disruptions today?");
        assert_eq!(reply, DISRUPTION_COSTS);
    }

    #[test]
    fn reserve_notice_questions_get_the_callout_rules() {
        let reply = answer("Can a reserve pilot be called out with only 1 hour notice?");
        assert_eq!(reply, RESERVE_CALLOUT);
    }

    #[test]
    fn unmatched_questions_get_help_echoing_the_question() {
        let reply = answer("Will it rain tomorrow in Tokyo?");
        assert!(reply.contains("Will it rain tomorrow in Tokyo?"));
        assert!(reply.contains("I can help with"));
    }
}
