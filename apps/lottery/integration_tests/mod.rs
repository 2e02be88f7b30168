mod draw;
mod run;
