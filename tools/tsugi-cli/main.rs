use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tsugi::prelude::*;

/// An adaptive form runner CLI: replay scripted answers or fill a form
/// interactively in the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the form definition JSON file (builder export)
    form_path: Option<String>,
    /// Optional path to a scripted answers JSON file
    answers_path: Option<String>,

    /// Run in interactive 'human' mode, prompting for every field
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,

    /// Print the run transcript after the run finishes
    #[arg(short, long)]
    trace: bool,
}

/// Submission sink that prints the accepted answer set to stdout.
struct StdoutSink;

impl SubmissionSink for StdoutSink {
    fn submit(&mut self, answers: &AnswerMap) -> std::result::Result<(), SubmissionError> {
        println!("\n--- Submitted Answers ---");
        let mut ids: Vec<&String> = answers.keys().collect();
        ids.sort();
        for id in ids {
            if let Some(value) = answers.get(id) {
                println!("  {} = {}", id, value);
            }
        }
        Ok(())
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive(cli);
    } else {
        run_scripted(cli);
    }
}

fn load_plan(form_path: &str) -> (FormPlan, std::time::Duration) {
    let load_start = Instant::now();
    let form_json = fs::read_to_string(form_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read form file '{}': {}", form_path, e))
    });
    let raw: UiForm = serde_json::from_str(&form_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse form JSON: {}", e)));
    let definition = raw
        .into_form()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert form: {}", e)));
    let plan = FormPlan::compile(definition)
        .unwrap_or_else(|e| exit_with_error(&format!("Form compilation failed: {}", e)));
    (plan, load_start.elapsed())
}

/// Replays a scripted answer set against the form without prompting.
fn run_scripted(cli: Cli) {
    let form_path = cli
        .form_path
        .unwrap_or_else(|| exit_with_error("Form path is required in scripted mode."));
    let answers_path = cli
        .answers_path
        .unwrap_or_else(|| exit_with_error("Answers path is required in scripted mode."));

    let (plan, load_duration) = load_plan(&form_path);
    let script = SampleAnswers::from_file(&answers_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load answers from '{}': {}",
            answers_path, e
        ))
    });

    println!(
        "Compiled form with {} field(s) and {} rule(s) in {:?}",
        plan.len(),
        plan.rules().len(),
        load_duration
    );

    let mut runner = Runner::new(plan, Box::new(StdoutSink));
    let run_start = Instant::now();
    runner.start();

    let mut steps = 0usize;
    while runner.phase() != RunPhase::Submitted {
        steps += 1;
        if steps > 10_000 {
            exit_with_error("Replay did not terminate; aborting.");
        }

        let field_id = match runner.view() {
            RunView::OnField(view) => view.field.id.clone(),
            _ => break,
        };
        if let Some(value) = script.value_for(&field_id) {
            runner.set_value(&field_id, value);
        }
        match runner.advance() {
            StepOutcome::Blocked => {
                // The full pre-submit pass may have jumped the run to an
                // earlier gap; report the field it halted on.
                let (blocked_id, message) = match runner.view() {
                    RunView::OnField(view) => {
                        (view.field.id.clone(), view.error_message().unwrap_or_default())
                    }
                    _ => (field_id, String::new()),
                };
                exit_with_error(&format!(
                    "Field '{}' rejected the scripted answer: {}",
                    blocked_id, message
                ));
            }
            StepOutcome::SubmitFailed => {
                exit_with_error("The submission sink rejected the answer set.")
            }
            _ => {}
        }
    }
    let run_duration = run_start.elapsed();

    if cli.trace {
        println!("\n--- Transcript ---");
        print!("{}", TraceFormatter::format_trace(runner.trace()));
    }

    println!("\n--- Performance Summary ---");
    println!("Load + Compile:  {:?}", load_duration);
    println!("Replay:          {:?}", run_duration);
    println!("Steps Executed:  {}", steps);
}

/// Runs the form in the terminal, one field at a time.
///
/// Enter commits single-line input and advances; multi-line fields read
/// until a lone `.`; `:back` retreats one field.
fn run_interactive(cli: Cli) {
    println!("--- Tsugi Interactive Mode ---");

    let form_path = match cli.form_path {
        Some(path) => path,
        None => prompt_for_input("Enter form definition path", Some("data/form.json")),
    };
    let (plan, _) = load_plan(&form_path);

    let mut runner = Runner::new(plan, Box::new(StdoutSink));
    runner.start();

    enum NextStep {
        Ask(FieldPrompt),
        Begin,
        Done,
    }

    loop {
        // Extract owned display data so the view borrow ends before any
        // navigation call.
        let step = match runner.view() {
            RunView::OnField(view) => {
                NextStep::Ask(FieldPrompt::from_view(&view, runner.progress()))
            }
            RunView::Submitted => NextStep::Done,
            RunView::Intro | RunView::Submitting => NextStep::Begin,
        };
        let prompt = match step {
            NextStep::Ask(prompt) => prompt,
            NextStep::Begin => {
                runner.start();
                continue;
            }
            NextStep::Done => break,
        };

        prompt.print();

        let raw = if prompt.multi_line {
            read_multi_line()
        } else {
            read_line()
        };

        if raw == ":back" {
            runner.go_back();
            continue;
        }

        let explicit_submit = raw == ":submit";
        if !explicit_submit && !raw.is_empty() && !prompt.statement {
            match parse_input(&prompt, &raw) {
                Some(value) => runner.set_value(&prompt.field_id, value),
                None => {
                    println!("Could not read that as a {} answer.", prompt.type_name);
                    continue;
                }
            }
        }

        let outcome = if explicit_submit {
            runner.submit()
        } else {
            runner.advance()
        };

        match outcome {
            StepOutcome::Blocked => {
                if let RunView::OnField(view) = runner.view() {
                    if let Some(message) = view.error_message() {
                        println!("  ! {}", message);
                    }
                }
            }
            StepOutcome::SubmitFailed => {
                println!("  ! Submission was rejected; your answers are preserved.");
            }
            _ => {}
        }
    }

    if cli.trace {
        println!("\n--- Transcript ---");
        print!("{}", TraceFormatter::format_trace(runner.trace()));
    }
    println!("\nAll done. Thanks!");
}

/// Display data for one field, extracted so the borrow on the runner ends
/// before navigation calls.
struct FieldPrompt {
    field_id: String,
    label: String,
    help_text: Option<String>,
    required: bool,
    type_name: &'static str,
    options: Vec<String>,
    multi_select: bool,
    multi_line: bool,
    statement: bool,
    yes_no: bool,
    numeric: bool,
    is_last: bool,
    progress: Option<(usize, usize)>,
}

impl FieldPrompt {
    fn from_view(view: &FieldView<'_>, progress: Option<(usize, usize)>) -> Self {
        let field = view.field;
        Self {
            field_id: field.id.clone(),
            label: field.label.clone(),
            help_text: field.help_text.clone(),
            required: field.required,
            type_name: field.field_type.as_str(),
            options: field.options.clone(),
            multi_select: field.field_type == FieldType::MultiSelect,
            multi_line: !view.advances_on_enter(),
            statement: !field.field_type.carries_answer(),
            yes_no: matches!(field.field_type, FieldType::YesNo | FieldType::Checkbox),
            numeric: matches!(field.field_type, FieldType::Number | FieldType::Rating),
            is_last: view.is_last_visible,
            progress,
        }
    }

    fn print(&self) {
        println!();
        if let Some((position, total)) = self.progress {
            println!("[{} / {}]", position, total);
        }
        let marker = if self.required { " *" } else { "" };
        println!("{}{}", self.label, marker);
        if let Some(help) = &self.help_text {
            println!("  ({})", help);
        }
        for (index, option) in self.options.iter().enumerate() {
            println!("  {}: {}", index + 1, option);
        }
        if self.statement {
            println!("  [press Enter to continue]");
        } else if self.multi_line {
            println!("  [finish with a lone '.' on its own line]");
        } else if self.multi_select {
            println!("  [comma-separated choices]");
        } else if self.yes_no {
            println!("  [y/n]");
        }
        if self.is_last {
            println!("  [last question: Enter submits]");
        }
        print!("> ");
        io::stdout().flush().expect("stdout is writable");
    }
}

/// Maps raw terminal input to a runtime value for the field's widget type.
fn parse_input(prompt: &FieldPrompt, raw: &str) -> Option<Value> {
    if prompt.yes_no {
        return match raw.to_lowercase().as_str() {
            "y" | "yes" | "true" => Some(Value::Bool(true)),
            "n" | "no" | "false" => Some(Value::Bool(false)),
            _ => None,
        };
    }
    if prompt.numeric {
        return raw.trim().parse::<f64>().ok().map(Value::Number);
    }
    if prompt.multi_select {
        let picks = raw
            .split(',')
            .map(|token| resolve_option(&prompt.options, token.trim()))
            .collect::<Option<Vec<String>>>()?;
        return Some(Value::List(picks));
    }
    if !prompt.options.is_empty() {
        return resolve_option(&prompt.options, raw).map(Value::Text);
    }
    Some(Value::Text(raw.to_string()))
}

/// Accepts either a 1-based option number or the literal option text.
fn resolve_option(options: &[String], token: &str) -> Option<String> {
    if let Ok(number) = token.parse::<usize>() {
        if number >= 1 && number <= options.len() {
            return Some(options[number - 1].clone());
        }
    }
    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(token))
        .cloned()
}

fn read_line() -> String {
    let mut line = String::new();
    io::stdin().read_line(&mut line).expect("stdin is readable");
    line.trim().to_string()
}

fn read_multi_line() -> String {
    let mut lines = Vec::new();
    loop {
        let line = read_line();
        if line == "." {
            break;
        }
        if line == ":back" && lines.is_empty() {
            return line;
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));
    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().expect("stdout is writable");

    let trimmed = read_line();
    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
