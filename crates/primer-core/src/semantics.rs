/// What an interactive region is, as the runner and the harness see it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Button,
    TextField,
}
