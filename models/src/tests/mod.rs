mod draw_request;
mod winner_count;
