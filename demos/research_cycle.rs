//! Research Cycle Example
//!
//! Walks one full simulated research-and-peer-review cycle through the
//! schema: profiles and papers in, insight → idea → proposal → review →
//! rebuttal → meta-review out, with a log entry per step.
//!
//! Run with: cargo run --example research_cycle

use scholarsim::log::{
    IdeaBrainstormLog, LiteratureReviewLog, MetaReviewWritingLog, ProposalWritingLog,
    RebuttalWritingLog, ReviewWritingLog,
};
use scholarsim::paper::Paper;
use scholarsim::profile::Profile;
use scholarsim::progress::{Extensible, Idea, Insight, MetaReview, Proposal, Rebuttal, Review};
use scholarsim::prompt::Message;
use scholarsim::Record;

fn main() {
    println!("=== ScholarSim Research Cycle ===\n");

    // -------------------------------------------------------------------------
    // 1. The cast: a leader, a reviewer, a chair
    // -------------------------------------------------------------------------
    println!("1. Creating profiles...");

    let leader = Profile::builder("Ada Lovelace", "Works on analytical engines.")
        .domain(vec!["computing".to_string(), "mathematics".to_string()])
        .institute("Analytical Society")
        .build();
    let reviewer = Profile::builder("George Boole", "Works on symbolic logic.")
        .leader_candidate(false)
        .build();
    let chair = Profile::builder("Mary Somerville", "Synthesizes the sciences.")
        .reviewer_candidate(false)
        .build();

    for profile in [&leader, &reviewer, &chair] {
        println!("   {} ({})", profile.name, profile.pk());
    }

    // -------------------------------------------------------------------------
    // 2. Literature in
    // -------------------------------------------------------------------------
    println!("\n2. Ingesting a paper...");

    let paper = Paper::builder(
        "On the Mechanical Solution of Polynomial Equations",
        "We describe an engine-based method for solving polynomials.",
    )
    .authors(vec!["Charles Babbage".to_string()])
    .domain("computing")
    .citation_count(41)
    .build();

    println!("   \"{}\" ({})", paper.title, paper.pk());

    // -------------------------------------------------------------------------
    // 3. Literature review at timestep 0
    // -------------------------------------------------------------------------
    println!("\n3. Reviewing literature...");

    let mut insight = Insight::new();
    insight.progress.content =
        "Engine methods generalize beyond arithmetic to symbol manipulation.".to_string();
    insight.progress.prompt_messages = vec![
        Message::new("system", "You are a literature review agent."),
        Message::new("user", "What gap does this paper leave open?"),
    ];

    let lit_log = LiteratureReviewLog::new(leader.pk())
        .insight_pk(insight.pk())
        .at_timestep(0);
    println!("   Insight {} logged at t={}", insight.pk(), lit_log.log.timestep);

    // -------------------------------------------------------------------------
    // 4. Brainstorm and proposal
    // -------------------------------------------------------------------------
    println!("\n4. Brainstorming and writing a proposal...");

    let mut idea = Idea::new();
    idea.progress.content = "Program the engine to weave algebraic patterns.".to_string();
    let idea_log = IdeaBrainstormLog::new(leader.pk(), idea.pk()).at_timestep(1);
    println!("   Idea {} logged at t={}", idea.pk(), idea_log.log.timestep);

    let mut proposal = Proposal::builder()
        .title("Programs as Engines of Thought")
        .abstract_text("We propose treating the analytical engine as a general symbol machine.")
        .citations(vec![paper.pk().to_string()])
        .conference("Royal Society 1843")
        .build();
    proposal.q1 = Some("Can engines manipulate symbols, not just numbers?".to_string());
    proposal.q2 = Some("It would found a science of operations.".to_string());

    let proposal_log = ProposalWritingLog::new(leader.pk(), proposal.pk()).at_timestep(2);
    println!(
        "   Proposal \"{}\" logged at t={}",
        proposal.title.as_deref().unwrap_or("untitled"),
        proposal_log.log.timestep
    );

    // -------------------------------------------------------------------------
    // 5. Review with an experimental extension field
    // -------------------------------------------------------------------------
    println!("\n5. Reviewing the proposal...");

    let mut review = Review::builder()
        .proposal_pk(proposal.pk())
        .reviewer_pk(reviewer.pk())
        .score(8)
        .build();
    review.assessment.summary = Some("Ambitious generalization of engine work.".to_string());
    review.assessment.strength = Some("Clear operational semantics.".to_string());
    review.assessment.weakness = Some("No complexity analysis.".to_string());
    review.set_extra("confidence", serde_json::json!(4));

    let review_log = ReviewWritingLog::new(reviewer.pk(), review.pk()).at_timestep(3);
    println!(
        "   Score {:?}, confidence {:?}, logged at t={}",
        review.score,
        review.get_extra("confidence"),
        review_log.log.timestep
    );

    // -------------------------------------------------------------------------
    // 6. Rebuttal
    // -------------------------------------------------------------------------
    println!("\n6. Writing the rebuttal...");

    let rebuttal = Rebuttal::builder()
        .proposal_pk(proposal.pk())
        .reviewer_pk(reviewer.pk())
        .author_pk(leader.pk())
        .q3("Complexity bounds follow from the card-count argument.")
        .build();
    let rebuttal_log = RebuttalWritingLog::new(leader.pk(), rebuttal.pk()).at_timestep(4);
    println!("   Rebuttal {} logged at t={}", rebuttal.pk(), rebuttal_log.log.timestep);

    // -------------------------------------------------------------------------
    // 7. Meta-review and decision
    // -------------------------------------------------------------------------
    println!("\n7. Chairing the meta-review...");

    let mut metareview = MetaReview::builder()
        .proposal_pk(proposal.pk())
        .chair_pk(chair.pk())
        .reviewer_pks(vec![reviewer.pk().to_string()])
        .author_pk(leader.pk())
        .decision(true)
        .build();
    metareview.assessment.summary =
        Some("The single review is positive and the rebuttal addresses it.".to_string());

    let meta_log = MetaReviewWritingLog::new(chair.pk(), metareview.pk()).at_timestep(5);
    println!(
        "   Decision: {}, logged at t={}",
        if metareview.decision { "accept" } else { "reject" },
        meta_log.log.timestep
    );

    // -------------------------------------------------------------------------
    // 8. Serialization demonstration
    // -------------------------------------------------------------------------
    println!("\n8. JSON serialization:");

    let json = serde_json::to_string_pretty(&review).unwrap();
    println!("   Review document:\n{json}");

    println!("\n=== Research Cycle Complete ===");
}
