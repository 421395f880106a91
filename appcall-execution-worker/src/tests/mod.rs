// Copyright (c) 2022 MASSA LABS <info@massa.net>

mod mock;
mod tests_eval_delta;
mod tests_lifecycle;
