// tr-score: Score ASR hypotheses against references with WER and CER.
//
// Both files are read line by line; line i of the hypothesis file is
// scored against line i of the reference file. Unless --raw is given,
// both sides go through the normalization pipeline first, with each
// side's counterpart supplied as context so suffix merging treats the
// pair consistently.
//
// Usage:
//   tr-score -r REF_FILE -y HYP_FILE [OPTIONS]
//
// Options:
//   -r, --ref FILE    Reference transcript file (`-` for stdin)
//   -y, --hyp FILE    Hypothesis transcript file (`-` for stdin)
//   --raw             Score without normalizing first
//   --json            Emit a JSON report instead of plain text
//   -h, --help        Print help

use serde::Serialize;

use trnorm::{cer, normalize_with, wer, DEFAULT_STAGES};

#[derive(Serialize)]
struct PairScore {
    reference: String,
    hypothesis: String,
    wer: f64,
    cer: f64,
}

#[derive(Serialize)]
struct Report {
    pairs: Vec<PairScore>,
    average_wer: f64,
    average_cer: f64,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (ref_path, args) = trnorm_cli::parse_option(&args, "--ref", "-r");
    let (hyp_path, args) = trnorm_cli::parse_option(&args, "--hyp", "-y");

    if trnorm_cli::wants_help(&args) {
        println!("tr-score: Score ASR hypotheses against references with WER and CER.");
        println!();
        println!("Usage: tr-score -r REF_FILE -y HYP_FILE [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -r, --ref FILE    Reference transcript file (`-` for stdin)");
        println!("  -y, --hyp FILE    Hypothesis transcript file (`-` for stdin)");
        println!("  --raw             Score without normalizing first");
        println!("  --json            Emit a JSON report instead of plain text");
        println!("  -h, --help        Print this help");
        return;
    }

    let raw = args.iter().any(|a| a == "--raw");
    let json = args.iter().any(|a| a == "--json");

    let Some(ref_path) = ref_path else {
        trnorm_cli::fatal("missing required option --ref");
    };
    let Some(hyp_path) = hyp_path else {
        trnorm_cli::fatal("missing required option --hyp");
    };
    if ref_path == "-" && hyp_path == "-" {
        trnorm_cli::fatal("only one of --ref and --hyp can read from stdin");
    }

    let references = trnorm_cli::read_lines(&ref_path).unwrap_or_else(|e| trnorm_cli::fatal(&e));
    let hypotheses = trnorm_cli::read_lines(&hyp_path).unwrap_or_else(|e| trnorm_cli::fatal(&e));

    if references.len() != hypotheses.len() {
        trnorm_cli::fatal(&format!(
            "reference line count ({}) does not match hypothesis line count ({})",
            references.len(),
            hypotheses.len()
        ));
    }
    if references.is_empty() {
        trnorm_cli::fatal("no line pairs to score");
    }

    let mut pairs = Vec::with_capacity(references.len());
    for (reference, hypothesis) in references.iter().zip(&hypotheses) {
        let (scored_ref, scored_hyp) = if raw {
            (reference.clone(), hypothesis.clone())
        } else {
            (
                normalize_with(reference, DEFAULT_STAGES, Some(hypothesis)),
                normalize_with(hypothesis, DEFAULT_STAGES, Some(reference)),
            )
        };

        let pair_wer = wer(&scored_ref, &scored_hyp);
        let pair_cer = cer(&scored_ref, &scored_hyp);

        pairs.push(PairScore {
            reference: scored_ref,
            hypothesis: scored_hyp,
            wer: pair_wer,
            cer: pair_cer,
        });
    }

    let count = pairs.len() as f64;
    let average_wer = pairs.iter().map(|p| p.wer).sum::<f64>() / count;
    let average_cer = pairs.iter().map(|p| p.cer).sum::<f64>() / count;

    if json {
        let report = Report {
            pairs,
            average_wer,
            average_cer,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => trnorm_cli::fatal(&format!("failed to serialize report: {e}")),
        }
        return;
    }

    for (i, pair) in pairs.iter().enumerate() {
        println!("{}: WER {:.4}  CER {:.4}", i + 1, pair.wer, pair.cer);
    }
    println!("average: WER {:.4}  CER {:.4}", average_wer, average_cer);
}
