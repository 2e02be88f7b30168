mod cancellation;
mod draw_flow;
mod helpers;
mod persistence;
