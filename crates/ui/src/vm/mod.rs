mod markdown_vm;
mod question_vm;
mod quiz_vm;
mod results_vm;
mod setup_vm;

pub use markdown_vm::{feedback_html, markdown_to_html, sanitize_html};
pub use question_vm::{OptionVm, QuestionVm, map_question};
pub use quiz_vm::{AlertVm, Effect, QuizEvent, QuizVm, ScreenBody, ScreenVm};
pub use results_vm::{ResultItemVm, ResultsVm, SolutionVm, map_results};
pub use setup_vm::{SelectOptionVm, SetupForm, SetupVm, map_setup};
